//! Callback events and the command registry.
//!
//! Every `CallbackCommand` the platform sends maps to exactly one [`Event`]
//! and one payload shape. [`Payload::decode`] resolves the command and
//! decodes the body into the matching typed payload.

use std::fmt;

use thiserror::Error;

use super::types::{
    AfterBlacklistAdd, AfterBlacklistDelete, AfterFriendAdd, AfterFriendDelete,
    AfterGroupCreate, AfterGroupDestroyed, AfterGroupFull, AfterGroupInfoChanged,
    AfterGroupMessageSend, AfterMemberExitGroup, AfterNewMemberJoinGroup,
    AfterPrivateMessageReport, AfterPrivateMessageRevoke, AfterPrivateMessageSend,
    BeforeApplyJoinGroup, BeforeFriendAdd, BeforeFriendResponse, BeforeGroupCreate,
    BeforeGroupMessageSend, BeforeInviteJoinGroup, BeforePrivateMessageSend, StateChange,
};

/// Failure to turn a command and body into a payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The command is not in the registry
    #[error("invalid callback command")]
    UnknownCommand(String),
    /// The body is not valid JSON for the command's payload shape
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A callback event delivered by the IM platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Event {
    /// A user logged in, logged out or was disconnected.
    StateChange,
    BeforeFriendAdd,
    BeforeFriendResponse,
    AfterFriendAdd,
    AfterFriendDelete,
    AfterBlacklistAdd,
    AfterBlacklistDelete,
    BeforePrivateMessageSend,
    AfterPrivateMessageSend,
    /// A one-to-one conversation was marked read.
    AfterPrivateMessageReport,
    AfterPrivateMessageRevoke,
    BeforeGroupCreate,
    AfterGroupCreate,
    BeforeApplyJoinGroup,
    BeforeInviteJoinGroup,
    AfterNewMemberJoinGroup,
    AfterMemberExitGroup,
    BeforeGroupMessageSend,
    AfterGroupMessageSend,
    /// A group reached its member limit.
    AfterGroupFull,
    AfterGroupDestroyed,
    AfterGroupInfoChanged,
}

impl Event {
    /// Every supported event, in registry order.
    pub const ALL: [Event; 22] = [
        Self::StateChange,
        Self::BeforeFriendAdd,
        Self::BeforeFriendResponse,
        Self::AfterFriendAdd,
        Self::AfterFriendDelete,
        Self::AfterBlacklistAdd,
        Self::AfterBlacklistDelete,
        Self::BeforePrivateMessageSend,
        Self::AfterPrivateMessageSend,
        Self::AfterPrivateMessageReport,
        Self::AfterPrivateMessageRevoke,
        Self::BeforeGroupCreate,
        Self::AfterGroupCreate,
        Self::BeforeApplyJoinGroup,
        Self::BeforeInviteJoinGroup,
        Self::AfterNewMemberJoinGroup,
        Self::AfterMemberExitGroup,
        Self::BeforeGroupMessageSend,
        Self::AfterGroupMessageSend,
        Self::AfterGroupFull,
        Self::AfterGroupDestroyed,
        Self::AfterGroupInfoChanged,
    ];

    /// The `CallbackCommand` value the platform uses for this event.
    pub const fn as_command(&self) -> &'static str {
        match self {
            Self::StateChange => "State.StateChange",
            Self::BeforeFriendAdd => "Sns.CallbackPrevFriendAdd",
            Self::BeforeFriendResponse => "Sns.CallbackPrevFriendResponse",
            Self::AfterFriendAdd => "Sns.CallbackFriendAdd",
            Self::AfterFriendDelete => "Sns.CallbackFriendDelete",
            Self::AfterBlacklistAdd => "Sns.CallbackBlackListAdd",
            Self::AfterBlacklistDelete => "Sns.CallbackBlackListDelete",
            Self::BeforePrivateMessageSend => "C2C.CallbackBeforeSendMsg",
            Self::AfterPrivateMessageSend => "C2C.CallbackAfterSendMsg",
            Self::AfterPrivateMessageReport => "C2C.CallbackAfterMsgReport",
            Self::AfterPrivateMessageRevoke => "C2C.CallbackAfterMsgWithDraw",
            Self::BeforeGroupCreate => "Group.CallbackBeforeCreateGroup",
            Self::AfterGroupCreate => "Group.CallbackAfterCreateGroup",
            Self::BeforeApplyJoinGroup => "Group.CallbackBeforeApplyJoinGroup",
            Self::BeforeInviteJoinGroup => "Group.CallbackBeforeInviteJoinGroup",
            Self::AfterNewMemberJoinGroup => "Group.CallbackAfterNewMemberJoin",
            Self::AfterMemberExitGroup => "Group.CallbackAfterMemberExit",
            Self::BeforeGroupMessageSend => "Group.CallbackBeforeSendMsg",
            Self::AfterGroupMessageSend => "Group.CallbackAfterSendMsg",
            Self::AfterGroupFull => "Group.CallbackAfterGroupFull",
            Self::AfterGroupDestroyed => "Group.CallbackAfterGroupDestroyed",
            Self::AfterGroupInfoChanged => "Group.CallbackAfterGroupInfoChanged",
        }
    }

    /// Resolve a `CallbackCommand` value. Matching is exact and case-sensitive.
    pub fn from_command(command: &str) -> Option<Self> {
        match command {
            "State.StateChange" => Some(Self::StateChange),
            "Sns.CallbackPrevFriendAdd" => Some(Self::BeforeFriendAdd),
            "Sns.CallbackPrevFriendResponse" => Some(Self::BeforeFriendResponse),
            "Sns.CallbackFriendAdd" => Some(Self::AfterFriendAdd),
            "Sns.CallbackFriendDelete" => Some(Self::AfterFriendDelete),
            "Sns.CallbackBlackListAdd" => Some(Self::AfterBlacklistAdd),
            "Sns.CallbackBlackListDelete" => Some(Self::AfterBlacklistDelete),
            "C2C.CallbackBeforeSendMsg" => Some(Self::BeforePrivateMessageSend),
            "C2C.CallbackAfterSendMsg" => Some(Self::AfterPrivateMessageSend),
            "C2C.CallbackAfterMsgReport" => Some(Self::AfterPrivateMessageReport),
            "C2C.CallbackAfterMsgWithDraw" => Some(Self::AfterPrivateMessageRevoke),
            "Group.CallbackBeforeCreateGroup" => Some(Self::BeforeGroupCreate),
            "Group.CallbackAfterCreateGroup" => Some(Self::AfterGroupCreate),
            "Group.CallbackBeforeApplyJoinGroup" => Some(Self::BeforeApplyJoinGroup),
            "Group.CallbackBeforeInviteJoinGroup" => Some(Self::BeforeInviteJoinGroup),
            "Group.CallbackAfterNewMemberJoin" => Some(Self::AfterNewMemberJoinGroup),
            "Group.CallbackAfterMemberExit" => Some(Self::AfterMemberExitGroup),
            "Group.CallbackBeforeSendMsg" => Some(Self::BeforeGroupMessageSend),
            "Group.CallbackAfterSendMsg" => Some(Self::AfterGroupMessageSend),
            "Group.CallbackAfterGroupFull" => Some(Self::AfterGroupFull),
            "Group.CallbackAfterGroupDestroyed" => Some(Self::AfterGroupDestroyed),
            "Group.CallbackAfterGroupInfoChanged" => Some(Self::AfterGroupInfoChanged),
            _ => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_command())
    }
}

/// A decoded callback body, one variant per [`Event`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    StateChange(StateChange),
    BeforeFriendAdd(BeforeFriendAdd),
    BeforeFriendResponse(BeforeFriendResponse),
    AfterFriendAdd(AfterFriendAdd),
    AfterFriendDelete(AfterFriendDelete),
    AfterBlacklistAdd(AfterBlacklistAdd),
    AfterBlacklistDelete(AfterBlacklistDelete),
    BeforePrivateMessageSend(BeforePrivateMessageSend),
    AfterPrivateMessageSend(AfterPrivateMessageSend),
    AfterPrivateMessageReport(AfterPrivateMessageReport),
    AfterPrivateMessageRevoke(AfterPrivateMessageRevoke),
    BeforeGroupCreate(BeforeGroupCreate),
    AfterGroupCreate(AfterGroupCreate),
    BeforeApplyJoinGroup(BeforeApplyJoinGroup),
    BeforeInviteJoinGroup(BeforeInviteJoinGroup),
    AfterNewMemberJoinGroup(AfterNewMemberJoinGroup),
    AfterMemberExitGroup(AfterMemberExitGroup),
    BeforeGroupMessageSend(BeforeGroupMessageSend),
    AfterGroupMessageSend(AfterGroupMessageSend),
    AfterGroupFull(AfterGroupFull),
    AfterGroupDestroyed(AfterGroupDestroyed),
    AfterGroupInfoChanged(AfterGroupInfoChanged),
}

impl Payload {
    /// Resolve `command` and decode `body` into its payload shape.
    ///
    /// An unknown command is reported before the body is looked at.
    pub fn decode(command: &str, body: &[u8]) -> Result<(Event, Payload), DecodeError> {
        let event = Event::from_command(command)
            .ok_or_else(|| DecodeError::UnknownCommand(command.to_string()))?;

        let payload = match event {
            Event::StateChange => Self::StateChange(serde_json::from_slice(body)?),
            Event::BeforeFriendAdd => Self::BeforeFriendAdd(serde_json::from_slice(body)?),
            Event::BeforeFriendResponse => {
                Self::BeforeFriendResponse(serde_json::from_slice(body)?)
            }
            Event::AfterFriendAdd => Self::AfterFriendAdd(serde_json::from_slice(body)?),
            Event::AfterFriendDelete => Self::AfterFriendDelete(serde_json::from_slice(body)?),
            Event::AfterBlacklistAdd => Self::AfterBlacklistAdd(serde_json::from_slice(body)?),
            Event::AfterBlacklistDelete => {
                Self::AfterBlacklistDelete(serde_json::from_slice(body)?)
            }
            Event::BeforePrivateMessageSend => {
                Self::BeforePrivateMessageSend(serde_json::from_slice(body)?)
            }
            Event::AfterPrivateMessageSend => {
                Self::AfterPrivateMessageSend(serde_json::from_slice(body)?)
            }
            Event::AfterPrivateMessageReport => {
                Self::AfterPrivateMessageReport(serde_json::from_slice(body)?)
            }
            Event::AfterPrivateMessageRevoke => {
                Self::AfterPrivateMessageRevoke(serde_json::from_slice(body)?)
            }
            Event::BeforeGroupCreate => Self::BeforeGroupCreate(serde_json::from_slice(body)?),
            Event::AfterGroupCreate => Self::AfterGroupCreate(serde_json::from_slice(body)?),
            Event::BeforeApplyJoinGroup => {
                Self::BeforeApplyJoinGroup(serde_json::from_slice(body)?)
            }
            Event::BeforeInviteJoinGroup => {
                Self::BeforeInviteJoinGroup(serde_json::from_slice(body)?)
            }
            Event::AfterNewMemberJoinGroup => {
                Self::AfterNewMemberJoinGroup(serde_json::from_slice(body)?)
            }
            Event::AfterMemberExitGroup => {
                Self::AfterMemberExitGroup(serde_json::from_slice(body)?)
            }
            Event::BeforeGroupMessageSend => {
                Self::BeforeGroupMessageSend(serde_json::from_slice(body)?)
            }
            Event::AfterGroupMessageSend => {
                Self::AfterGroupMessageSend(serde_json::from_slice(body)?)
            }
            Event::AfterGroupFull => Self::AfterGroupFull(serde_json::from_slice(body)?),
            Event::AfterGroupDestroyed => {
                Self::AfterGroupDestroyed(serde_json::from_slice(body)?)
            }
            Event::AfterGroupInfoChanged => {
                Self::AfterGroupInfoChanged(serde_json::from_slice(body)?)
            }
        };

        Ok((event, payload))
    }

    /// The event this payload belongs to.
    pub const fn event(&self) -> Event {
        match self {
            Self::StateChange(_) => Event::StateChange,
            Self::BeforeFriendAdd(_) => Event::BeforeFriendAdd,
            Self::BeforeFriendResponse(_) => Event::BeforeFriendResponse,
            Self::AfterFriendAdd(_) => Event::AfterFriendAdd,
            Self::AfterFriendDelete(_) => Event::AfterFriendDelete,
            Self::AfterBlacklistAdd(_) => Event::AfterBlacklistAdd,
            Self::AfterBlacklistDelete(_) => Event::AfterBlacklistDelete,
            Self::BeforePrivateMessageSend(_) => Event::BeforePrivateMessageSend,
            Self::AfterPrivateMessageSend(_) => Event::AfterPrivateMessageSend,
            Self::AfterPrivateMessageReport(_) => Event::AfterPrivateMessageReport,
            Self::AfterPrivateMessageRevoke(_) => Event::AfterPrivateMessageRevoke,
            Self::BeforeGroupCreate(_) => Event::BeforeGroupCreate,
            Self::AfterGroupCreate(_) => Event::AfterGroupCreate,
            Self::BeforeApplyJoinGroup(_) => Event::BeforeApplyJoinGroup,
            Self::BeforeInviteJoinGroup(_) => Event::BeforeInviteJoinGroup,
            Self::AfterNewMemberJoinGroup(_) => Event::AfterNewMemberJoinGroup,
            Self::AfterMemberExitGroup(_) => Event::AfterMemberExitGroup,
            Self::BeforeGroupMessageSend(_) => Event::BeforeGroupMessageSend,
            Self::AfterGroupMessageSend(_) => Event::AfterGroupMessageSend,
            Self::AfterGroupFull(_) => Event::AfterGroupFull,
            Self::AfterGroupDestroyed(_) => Event::AfterGroupDestroyed,
            Self::AfterGroupInfoChanged(_) => Event::AfterGroupInfoChanged,
        }
    }
}
