use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One violated rule, as it appears on the wire.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Message {
    #[schema(example = "Email is required field")]
    pub message: String,
}

impl Message {
    pub fn new<T: ToString>(message: T) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Ordered accumulator of validation failures.
///
/// Order is part of the response contract: messages are reported in the
/// order the rules were checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    messages: Vec<Message>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<T: ToString>(&mut self, message: T) {
        self.messages.push(Message::new(message));
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

/// Credential rules shared by registration and login.
///
/// Every field is checked; the password length rule and the password
/// required rule are mutually exclusive, so at most one of the two fires
/// for a given value.
pub fn credentials(email: Option<&str>, password: Option<&str>) -> Validation {
    let mut validation = Validation::new();

    if email.map(str::trim).unwrap_or("").is_empty() {
        validation.add("Email is required field");
    }

    match password {
        None | Some("") => validation.add("Password is required field"),
        Some(password) if password.chars().count() < 6 => {
            validation.add("Password at least have 6 characters");
        }
        _ => {}
    }

    validation
}
