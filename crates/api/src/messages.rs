//! User-facing response messages, one table per supported locale.

use std::fmt;
use std::str::FromStr;

/// Language used for `message` and `error` strings in responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

/// The fixed strings returned by the client handlers.
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub client_not_found: &'static str,
    pub name_and_email_required: &'static str,
    pub email_already_registered: &'static str,
    pub client_created: &'static str,
    pub client_updated: &'static str,
    pub client_deleted: &'static str,
}

static EN: Messages = Messages {
    client_not_found: "Client not found",
    name_and_email_required: "Name and email are required",
    email_already_registered: "Email already registered",
    client_created: "Client created successfully",
    client_updated: "Client updated successfully",
    client_deleted: "Client deleted successfully",
};

static PT_BR: Messages = Messages {
    client_not_found: "Cliente não encontrado",
    name_and_email_required: "Nome e email são obrigatórios",
    email_already_registered: "Email já cadastrado",
    client_created: "Cliente criado com sucesso",
    client_updated: "Cliente atualizado com sucesso",
    client_deleted: "Cliente excluído com sucesso",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::PtBr => &PT_BR,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::PtBr => write!(f, "pt-br"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Self::En),
            "pt" | "pt-br" => Ok(Self::PtBr),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}
