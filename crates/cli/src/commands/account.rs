//! Profile and registration commands.

use planta_client::AppState;
use planta_core::{Email, NewUser};

use super::CommandError;

/// Show the session user's profile.
pub async fn show(state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
    let user_id = state.session_user.clone();
    state.profile.fetch(&user_id).await?;

    match state.profile.profile() {
        Some(profile) => {
            println!("id:      {}", profile.id);
            println!("name:    {}", profile.name);
            println!("email:   {}", profile.email);
            println!("phone:   {}", profile.phone);
            println!("address: {}", profile.address.as_deref().unwrap_or("-"));
        }
        None => println!("No profile loaded."),
    }
    Ok(())
}

/// Update some profile fields and save the full record.
pub async fn update(
    state: &mut AppState,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let user_id = state.session_user.clone();
    state.profile.fetch(&user_id).await?;

    let Some(mut profile) = state.profile.profile().cloned() else {
        return Err(CommandError::InvalidInput("no profile to update".to_string()).into());
    };

    if let Some(name) = name {
        profile.name = name;
    }
    if let Some(email) = email {
        Email::parse(&email).map_err(|e| CommandError::InvalidInput(e.to_string()))?;
        profile.email = email;
    }
    if let Some(phone) = phone {
        profile.phone = phone;
    }
    if let Some(address) = address {
        profile.address = Some(address);
    }

    state.profile.save(profile).await?;
    println!("Profile saved");
    Ok(())
}

/// Register a new account.
///
/// All fields are required and the email must be well-formed; validation
/// failures abort before any network call.
pub async fn register(
    state: &AppState,
    name: String,
    email: String,
    password: String,
    phone: String,
) -> Result<(), Box<dyn std::error::Error>> {
    if name.is_empty() || password.is_empty() || phone.is_empty() {
        return Err(
            CommandError::InvalidInput("name, password, and phone are required".to_string())
                .into(),
        );
    }
    Email::parse(&email).map_err(|e| CommandError::InvalidInput(e.to_string()))?;

    state
        .api()
        .register_user(&NewUser {
            name,
            email,
            password,
            phone,
        })
        .await?;

    println!("Account registered");
    Ok(())
}
