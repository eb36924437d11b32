//! Per-operation request status

/// Identifies one issued request; completions carrying an older ticket
/// are discarded
pub type Ticket = u64;

/// The three requests the client can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Generate,
    Download,
    Upload,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Generate => "generate",
            Operation::Download => "download",
            Operation::Upload => "upload",
        }
    }

    /// Message shown when nothing more specific is known
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Generate => "Generation failed",
            Operation::Download => "Download failed",
            Operation::Upload => "Upload failed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OpStatus {
    #[default]
    Idle,
    InFlight(Ticket),
    Succeeded,
    Failed(String),
}

impl OpStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, OpStatus::InFlight(_))
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        matches!(self, OpStatus::InFlight(t) if *t == ticket)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            OpStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
