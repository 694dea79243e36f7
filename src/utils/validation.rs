//! Request field rules, one function per field so the error messages stay
//! specific. Each returns the exact message the client sees.

pub fn validate_nickname(nickname: &str) -> Result<(), String> {
    if nickname.len() < 3 {
        return Err("The 'nickname' field must be at least 3 characters long".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 6 {
        return Err("The 'password' field must be at least 6 characters long".to_string());
    }
    Ok(())
}

/// Deliberately simplistic: the address must contain "@" and ".com".
///
/// This is not RFC parsing and rejects perfectly valid addresses like
/// user@example.org. It is the check the existing web client was built
/// against, so it stays.
pub fn validate_email(email: &str) -> Result<(), String> {
    if !email.contains('@') || !email.contains(".com") {
        return Err("The 'email' field must be a valid email address".to_string());
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), String> {
    if title.len() < 3 {
        return Err("The 'title' field must be at least 3 characters long".to_string());
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), String> {
    if description.len() < 10 {
        return Err("The 'description' field must be at least 10 characters long".to_string());
    }
    Ok(())
}
