//! Callback payload types and the acknowledgement envelope.
//!
//! Field names match the platform's wire names (`GroupId`, `From_Account`,
//! ...). Every payload is decoded with `#[serde(default)]`, so fields the
//! platform leaves out or sends as `null` come back empty, while a field of
//! the wrong JSON type still fails the decode.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decode `null` as the field's default, the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// Acknowledgement Envelope
// =============================================================================

/// Standard response envelope the platform expects from every callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    /// `"OK"` or `"FAIL"`
    #[serde(rename = "ActionStatus")]
    pub action_status: String,
    /// Zero on success, application-defined otherwise
    #[serde(rename = "ErrorCode")]
    pub error_code: i32,
    /// Human-readable detail, empty when not supplied
    #[serde(rename = "ErrorInfo", default)]
    pub error_info: String,
}

// =============================================================================
// Shared Fragments
// =============================================================================

/// One element of a message body.
///
/// `MsgContent` depends on `MsgType` (`TIMTextElem`, `TIMImageElem`, ...)
/// and is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgBody {
    #[serde(rename = "MsgType", deserialize_with = "null_as_default")]
    pub msg_type: String,
    #[serde(rename = "MsgContent")]
    pub msg_content: Value,
}

/// A group member reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberAccount {
    #[serde(rename = "Member_Account", deserialize_with = "null_as_default")]
    pub user_id: String,
}

/// A custom key/value attached to a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDefinedData {
    #[serde(rename = "Key", deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(rename = "Value", deserialize_with = "null_as_default")]
    pub value: String,
}

/// A pair of accounts in a relationship-chain event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountPair {
    #[serde(rename = "From_Account", deserialize_with = "null_as_default")]
    pub from_user_id: String,
    #[serde(rename = "To_Account", deserialize_with = "null_as_default")]
    pub to_user_id: String,
    /// Only set on friend-add events
    #[serde(
        rename = "Initiator_Account",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub initiator_user_id: String,
}

// =============================================================================
// Online State
// =============================================================================

/// Login state of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateInfo {
    #[serde(rename = "To_Account", deserialize_with = "null_as_default")]
    pub user_id: String,
    /// `Login`, `Logout` or `Disconnect`
    #[serde(rename = "Action", deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(rename = "Reason", deserialize_with = "null_as_default")]
    pub reason: String,
}

/// A device kicked offline by a new login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickedDevice {
    #[serde(rename = "Platform", deserialize_with = "null_as_default")]
    pub platform: String,
}

/// `State.StateChange`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateChange {
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
    #[serde(rename = "Info", deserialize_with = "null_as_default")]
    pub info: StateInfo,
    #[serde(rename = "KickedDevice", deserialize_with = "null_as_default")]
    pub kicked_devices: Vec<KickedDevice>,
}

// =============================================================================
// Relationship Chain
// =============================================================================

/// A friend requested in a friend-add call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendAddItem {
    #[serde(rename = "To_Account", deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(rename = "Remark", deserialize_with = "null_as_default")]
    pub remark: String,
    #[serde(rename = "GroupName", deserialize_with = "null_as_default")]
    pub group_name: String,
    #[serde(rename = "AddSource", deserialize_with = "null_as_default")]
    pub add_source: String,
    #[serde(rename = "AddWording", deserialize_with = "null_as_default")]
    pub add_wording: String,
}

/// `Sns.CallbackPrevFriendAdd`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeforeFriendAdd {
    #[serde(rename = "Requester_Account", deserialize_with = "null_as_default")]
    pub requester_user_id: String,
    #[serde(rename = "From_Account", deserialize_with = "null_as_default")]
    pub from_user_id: String,
    /// `Add_Type_Single` or `Add_Type_Both`
    #[serde(rename = "AddType", deserialize_with = "null_as_default")]
    pub add_type: String,
    #[serde(rename = "ForceAddFlags", deserialize_with = "null_as_default")]
    pub force_add_flags: i32,
    #[serde(rename = "FriendItem", deserialize_with = "null_as_default")]
    pub friend_items: Vec<FriendAddItem>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// A response to a pending friend request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendResponseItem {
    #[serde(rename = "To_Account", deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(rename = "Remark", deserialize_with = "null_as_default")]
    pub remark: String,
    #[serde(rename = "TagName", deserialize_with = "null_as_default")]
    pub tag_name: String,
    /// `Response_Action_Agree` or `Response_Action_AgreeAndAdd`
    #[serde(rename = "ResponseAction", deserialize_with = "null_as_default")]
    pub response_action: String,
}

/// `Sns.CallbackPrevFriendResponse`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeforeFriendResponse {
    #[serde(rename = "Requester_Account", deserialize_with = "null_as_default")]
    pub requester_user_id: String,
    #[serde(rename = "From_Account", deserialize_with = "null_as_default")]
    pub from_user_id: String,
    #[serde(rename = "ResponseFriendItem", deserialize_with = "null_as_default")]
    pub response_items: Vec<FriendResponseItem>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Sns.CallbackFriendAdd`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterFriendAdd {
    #[serde(rename = "PairList", deserialize_with = "null_as_default")]
    pub pairs: Vec<AccountPair>,
    /// Which operation triggered the add, e.g. `Friend_Add` or `Friend_Response`
    #[serde(rename = "ClientCmd", deserialize_with = "null_as_default")]
    pub client_cmd: String,
    #[serde(rename = "Admin_Account", deserialize_with = "null_as_default")]
    pub admin_user_id: String,
    #[serde(rename = "ForceFlag", deserialize_with = "null_as_default")]
    pub force_flag: i32,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Sns.CallbackFriendDelete`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterFriendDelete {
    #[serde(rename = "PairList", deserialize_with = "null_as_default")]
    pub pairs: Vec<AccountPair>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Sns.CallbackBlackListAdd`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterBlacklistAdd {
    #[serde(rename = "PairList", deserialize_with = "null_as_default")]
    pub pairs: Vec<AccountPair>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Sns.CallbackBlackListDelete`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterBlacklistDelete {
    #[serde(rename = "PairList", deserialize_with = "null_as_default")]
    pub pairs: Vec<AccountPair>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

// =============================================================================
// One-to-One Messages
// =============================================================================

/// `C2C.CallbackBeforeSendMsg`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeforePrivateMessageSend {
    #[serde(rename = "MsgId", deserialize_with = "null_as_default")]
    pub msg_id: String,
    #[serde(rename = "From_Account", deserialize_with = "null_as_default")]
    pub from_user_id: String,
    #[serde(rename = "To_Account", deserialize_with = "null_as_default")]
    pub to_user_id: String,
    #[serde(rename = "MsgSeq", deserialize_with = "null_as_default")]
    pub msg_seq: u64,
    #[serde(rename = "MsgRandom", deserialize_with = "null_as_default")]
    pub msg_random: u64,
    #[serde(rename = "MsgTime", deserialize_with = "null_as_default")]
    pub msg_time: i64,
    #[serde(rename = "MsgKey", deserialize_with = "null_as_default")]
    pub msg_key: String,
    #[serde(rename = "OnlineOnlyFlag", deserialize_with = "null_as_default")]
    pub online_only_flag: i32,
    #[serde(rename = "MsgBody", deserialize_with = "null_as_default")]
    pub msg_body: Vec<MsgBody>,
    #[serde(rename = "CloudCustomData", deserialize_with = "null_as_default")]
    pub cloud_custom_data: String,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `C2C.CallbackAfterSendMsg`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterPrivateMessageSend {
    #[serde(rename = "MsgId", deserialize_with = "null_as_default")]
    pub msg_id: String,
    #[serde(rename = "From_Account", deserialize_with = "null_as_default")]
    pub from_user_id: String,
    #[serde(rename = "To_Account", deserialize_with = "null_as_default")]
    pub to_user_id: String,
    #[serde(rename = "MsgSeq", deserialize_with = "null_as_default")]
    pub msg_seq: u64,
    #[serde(rename = "MsgRandom", deserialize_with = "null_as_default")]
    pub msg_random: u64,
    #[serde(rename = "MsgTime", deserialize_with = "null_as_default")]
    pub msg_time: i64,
    #[serde(rename = "MsgKey", deserialize_with = "null_as_default")]
    pub msg_key: String,
    #[serde(rename = "OnlineOnlyFlag", deserialize_with = "null_as_default")]
    pub online_only_flag: i32,
    #[serde(rename = "MsgBody", deserialize_with = "null_as_default")]
    pub msg_body: Vec<MsgBody>,
    #[serde(rename = "CloudCustomData", deserialize_with = "null_as_default")]
    pub cloud_custom_data: String,
    /// Zero when delivery succeeded
    #[serde(rename = "SendMsgResult", deserialize_with = "null_as_default")]
    pub send_msg_result: i32,
    #[serde(rename = "ErrorInfo", deserialize_with = "null_as_default")]
    pub error_info: String,
    #[serde(rename = "UnreadMsgNum", deserialize_with = "null_as_default")]
    pub unread_msg_num: u32,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `C2C.CallbackAfterMsgReport`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterPrivateMessageReport {
    #[serde(rename = "Report_Account", deserialize_with = "null_as_default")]
    pub report_user_id: String,
    #[serde(rename = "Peer_Account", deserialize_with = "null_as_default")]
    pub peer_user_id: String,
    #[serde(rename = "LastReadTime", deserialize_with = "null_as_default")]
    pub last_read_time: i64,
    #[serde(rename = "UnreadMsgNum", deserialize_with = "null_as_default")]
    pub unread_msg_num: u32,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `C2C.CallbackAfterMsgWithDraw`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterPrivateMessageRevoke {
    #[serde(rename = "From_Account", deserialize_with = "null_as_default")]
    pub from_user_id: String,
    #[serde(rename = "To_Account", deserialize_with = "null_as_default")]
    pub to_user_id: String,
    #[serde(rename = "MsgKey", deserialize_with = "null_as_default")]
    pub msg_key: String,
    #[serde(rename = "UnreadMsgNum", deserialize_with = "null_as_default")]
    pub unread_msg_num: u32,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

// =============================================================================
// Groups
// =============================================================================

/// `Group.CallbackBeforeCreateGroup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeforeGroupCreate {
    #[serde(rename = "Operator_Account", deserialize_with = "null_as_default")]
    pub operator_user_id: String,
    #[serde(rename = "Owner_Account", deserialize_with = "null_as_default")]
    pub owner_user_id: String,
    /// Group type, e.g. `Public`, `Work`, `Meeting`
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub group_type: String,
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    /// Number of groups the operator has already created
    #[serde(rename = "CreateGroupNum", deserialize_with = "null_as_default")]
    pub create_group_num: u32,
    #[serde(rename = "MemberList", deserialize_with = "null_as_default")]
    pub members: Vec<MemberAccount>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Group.CallbackAfterCreateGroup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterGroupCreate {
    #[serde(rename = "GroupId", deserialize_with = "null_as_default")]
    pub group_id: String,
    #[serde(rename = "Operator_Account", deserialize_with = "null_as_default")]
    pub operator_user_id: String,
    #[serde(rename = "Owner_Account", deserialize_with = "null_as_default")]
    pub owner_user_id: String,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub group_type: String,
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "MemberList", deserialize_with = "null_as_default")]
    pub members: Vec<MemberAccount>,
    #[serde(rename = "UserDefinedDataList", deserialize_with = "null_as_default")]
    pub user_defined_data: Vec<UserDefinedData>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Group.CallbackBeforeApplyJoinGroup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeforeApplyJoinGroup {
    #[serde(rename = "GroupId", deserialize_with = "null_as_default")]
    pub group_id: String,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub group_type: String,
    #[serde(rename = "Requestor_Account", deserialize_with = "null_as_default")]
    pub requestor_user_id: String,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Group.CallbackBeforeInviteJoinGroup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeforeInviteJoinGroup {
    #[serde(rename = "GroupId", deserialize_with = "null_as_default")]
    pub group_id: String,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub group_type: String,
    #[serde(rename = "Operator_Account", deserialize_with = "null_as_default")]
    pub operator_user_id: String,
    #[serde(rename = "DestinationMembers", deserialize_with = "null_as_default")]
    pub destination_members: Vec<MemberAccount>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Group.CallbackAfterNewMemberJoin`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterNewMemberJoinGroup {
    #[serde(rename = "GroupId", deserialize_with = "null_as_default")]
    pub group_id: String,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub group_type: String,
    /// `Apply` or `Invited`
    #[serde(rename = "JoinType", deserialize_with = "null_as_default")]
    pub join_type: String,
    #[serde(rename = "Operator_Account", deserialize_with = "null_as_default")]
    pub operator_user_id: String,
    #[serde(rename = "NewMemberList", deserialize_with = "null_as_default")]
    pub new_members: Vec<MemberAccount>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Group.CallbackAfterMemberExit`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterMemberExitGroup {
    #[serde(rename = "GroupId", deserialize_with = "null_as_default")]
    pub group_id: String,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub group_type: String,
    /// `Kicked` or `Quit`
    #[serde(rename = "ExitType", deserialize_with = "null_as_default")]
    pub exit_type: String,
    #[serde(rename = "Operator_Account", deserialize_with = "null_as_default")]
    pub operator_user_id: String,
    #[serde(rename = "ExitMemberList", deserialize_with = "null_as_default")]
    pub exit_members: Vec<MemberAccount>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Group.CallbackBeforeSendMsg`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeforeGroupMessageSend {
    #[serde(rename = "GroupId", deserialize_with = "null_as_default")]
    pub group_id: String,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub group_type: String,
    #[serde(rename = "From_Account", deserialize_with = "null_as_default")]
    pub from_user_id: String,
    #[serde(rename = "Operator_Account", deserialize_with = "null_as_default")]
    pub operator_user_id: String,
    #[serde(rename = "Random", deserialize_with = "null_as_default")]
    pub random: u64,
    #[serde(rename = "OnlineOnlyFlag", deserialize_with = "null_as_default")]
    pub online_only_flag: i32,
    #[serde(rename = "MsgBody", deserialize_with = "null_as_default")]
    pub msg_body: Vec<MsgBody>,
    #[serde(rename = "CloudCustomData", deserialize_with = "null_as_default")]
    pub cloud_custom_data: String,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Group.CallbackAfterSendMsg`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterGroupMessageSend {
    #[serde(rename = "GroupId", deserialize_with = "null_as_default")]
    pub group_id: String,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub group_type: String,
    #[serde(rename = "From_Account", deserialize_with = "null_as_default")]
    pub from_user_id: String,
    #[serde(rename = "Operator_Account", deserialize_with = "null_as_default")]
    pub operator_user_id: String,
    #[serde(rename = "Random", deserialize_with = "null_as_default")]
    pub random: u64,
    #[serde(rename = "MsgSeq", deserialize_with = "null_as_default")]
    pub msg_seq: u64,
    #[serde(rename = "MsgTime", deserialize_with = "null_as_default")]
    pub msg_time: i64,
    #[serde(rename = "OnlineOnlyFlag", deserialize_with = "null_as_default")]
    pub online_only_flag: i32,
    #[serde(rename = "MsgBody", deserialize_with = "null_as_default")]
    pub msg_body: Vec<MsgBody>,
    #[serde(rename = "CloudCustomData", deserialize_with = "null_as_default")]
    pub cloud_custom_data: String,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Group.CallbackAfterGroupFull`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterGroupFull {
    #[serde(rename = "GroupId", deserialize_with = "null_as_default")]
    pub group_id: String,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Group.CallbackAfterGroupDestroyed`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterGroupDestroyed {
    #[serde(rename = "GroupId", deserialize_with = "null_as_default")]
    pub group_id: String,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub group_type: String,
    #[serde(rename = "Owner_Account", deserialize_with = "null_as_default")]
    pub owner_user_id: String,
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "MemberList", deserialize_with = "null_as_default")]
    pub members: Vec<MemberAccount>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

/// `Group.CallbackAfterGroupInfoChanged`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfterGroupInfoChanged {
    #[serde(rename = "GroupId", deserialize_with = "null_as_default")]
    pub group_id: String,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub group_type: String,
    #[serde(rename = "Operator_Account", deserialize_with = "null_as_default")]
    pub operator_user_id: String,
    /// Only the fields that changed are present
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Introduction", skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(rename = "Notification", skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
    #[serde(rename = "FaceUrl", skip_serializing_if = "Option::is_none")]
    pub face_url: Option<String>,
    #[serde(rename = "UserDefinedDataList", deserialize_with = "null_as_default")]
    pub user_defined_data: Vec<UserDefinedData>,
    #[serde(rename = "EventTime", deserialize_with = "null_as_default")]
    pub event_time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_response_wire_names() {
        let resp = AckResponse {
            action_status: "OK".to_string(),
            error_code: 0,
            error_info: String::new(),
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"ActionStatus":"OK","ErrorCode":0,"ErrorInfo":""}"#);
    }

    #[test]
    fn test_private_message_with_text_elem() {
        let body = r#"{
            "From_Account": "jared",
            "To_Account": "Jonh",
            "MsgSeq": 48374,
            "MsgRandom": 2837546,
            "MsgTime": 1557481126,
            "MsgKey": "48374_2837546_1557481126",
            "OnlineOnlyFlag": 1,
            "MsgBody": [
                {"MsgType": "TIMTextElem", "MsgContent": {"Text": "red packet"}}
            ],
            "CloudCustomData": "your cloud custom data",
            "EventTime": 1670574414123
        }"#;

        let msg: BeforePrivateMessageSend = serde_json::from_str(body).unwrap();

        assert_eq!(msg.from_user_id, "jared");
        assert_eq!(msg.to_user_id, "Jonh");
        assert_eq!(msg.msg_seq, 48374);
        assert_eq!(msg.msg_body.len(), 1);
        assert_eq!(msg.msg_body[0].msg_type, "TIMTextElem");
        assert_eq!(msg.msg_body[0].msg_content["Text"], "red packet");
    }

    #[test]
    fn test_member_exit_lists_members() {
        let body = r#"{
            "GroupId": "@TGS#2J4SZEAEL",
            "Type": "Public",
            "ExitType": "Kicked",
            "Operator_Account": "leckie",
            "ExitMemberList": [{"Member_Account": "jared"}, {"Member_Account": "tommy"}]
        }"#;

        let exit: AfterMemberExitGroup = serde_json::from_str(body).unwrap();

        assert_eq!(exit.exit_type, "Kicked");
        assert_eq!(
            exit.exit_members
                .iter()
                .map(|m| m.user_id.as_str())
                .collect::<Vec<_>>(),
            vec!["jared", "tommy"]
        );
        assert_eq!(exit.event_time, 0);
    }

    #[test]
    fn test_group_info_changed_only_present_fields() {
        let body = r#"{"GroupId": "@TGS#1", "Notification": "hello"}"#;

        let changed: AfterGroupInfoChanged = serde_json::from_str(body).unwrap();

        assert_eq!(changed.notification.as_deref(), Some("hello"));
        assert!(changed.name.is_none());
        assert!(changed.face_url.is_none());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let body = r#"{
            "GroupId": "@TGS#1",
            "Type": null,
            "Random": null,
            "MsgBody": null,
            "CloudCustomData": null
        }"#;

        let msg: AfterGroupMessageSend = serde_json::from_str(body).unwrap();

        assert_eq!(msg.group_id, "@TGS#1");
        assert_eq!(msg.group_type, "");
        assert_eq!(msg.random, 0);
        assert!(msg.msg_body.is_empty());
        assert_eq!(msg.cloud_custom_data, "");
    }

    #[test]
    fn test_null_nested_fields_decode_as_empty() {
        let body = r#"{"Info": null, "KickedDevice": [{"Platform": null}]}"#;

        let state: StateChange = serde_json::from_str(body).unwrap();

        assert_eq!(state.info, StateInfo::default());
        assert_eq!(state.kicked_devices, vec![KickedDevice::default()]);
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let result = serde_json::from_str::<AfterGroupFull>(r#"{"GroupId": 42}"#);
        assert!(result.is_err());
    }
}
