use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    match config.branch_timeout() {
        Ok(d) if d.is_zero() => {
            errors.push("branch_timeout: must be greater than zero".to_string());
        }
        Ok(_) => {}
        Err(e) => {
            errors.push(format!("branch_timeout: {:#}", e));
        }
    }

    if config.git_program.trim().is_empty() {
        errors.push("git_program: must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
