//! Raw entry points exported by the host process.
//!
//! Implementations forward each call across the native boundary. Integer
//! returns are host status codes (`0` on success, negative on failure);
//! string returns are plain text or base64 payloads, empty when the host has
//! nothing to give.

/// The host's native plugin interface.
///
/// Every call carries the auth code the host issued to the plugin at start-up.
pub trait NativeHost {
    fn send_private_msg(&self, auth_code: i32, qq_id: i64, msg: &str) -> i32;
    fn send_group_msg(&self, auth_code: i32, group_id: i64, msg: &str) -> i32;
    fn send_discuss_msg(&self, auth_code: i32, discuss_id: i64, msg: &str) -> i32;
    fn delete_msg(&self, auth_code: i32, msg_id: i64) -> i32;
    fn send_like(&self, auth_code: i32, qq_id: i64, times: i32) -> i32;
    fn get_record(&self, auth_code: i32, file: &str, out_format: &str) -> String;

    fn get_login_qq(&self, auth_code: i32) -> i64;
    fn get_login_nick(&self, auth_code: i32) -> String;
    fn get_app_directory(&self, auth_code: i32) -> String;
    fn get_cookies(&self, auth_code: i32) -> String;
    fn get_csrf_token(&self, auth_code: i32) -> i32;

    fn get_stranger_info(&self, auth_code: i32, qq_id: i64, no_cache: bool) -> String;
    fn get_group_member_info(
        &self,
        auth_code: i32,
        group_id: i64,
        qq_id: i64,
        no_cache: bool,
    ) -> String;
    fn get_group_member_list(&self, auth_code: i32, group_id: i64) -> String;
    fn get_group_list(&self, auth_code: i32) -> String;

    fn add_log(&self, auth_code: i32, priority: i32, category: &str, content: &str) -> i32;
    fn set_fatal(&self, auth_code: i32, message: &str) -> i32;

    fn set_friend_add_request(
        &self,
        auth_code: i32,
        response_flag: &str,
        response: i32,
        remark: &str,
    ) -> i32;
    fn set_group_add_request(
        &self,
        auth_code: i32,
        response_flag: &str,
        request: i32,
        response: i32,
        reason: &str,
    ) -> i32;

    fn set_group_anonymous_ban(
        &self,
        auth_code: i32,
        group_id: i64,
        anonymous: &str,
        duration: i64,
    ) -> i32;
    fn set_group_ban(&self, auth_code: i32, group_id: i64, qq_id: i64, duration: i64) -> i32;
    fn set_group_whole_ban(&self, auth_code: i32, group_id: i64, enable: bool) -> i32;
    fn set_group_card(&self, auth_code: i32, group_id: i64, qq_id: i64, card: &str) -> i32;
    fn set_group_special_title(
        &self,
        auth_code: i32,
        group_id: i64,
        qq_id: i64,
        title: &str,
        duration: i64,
    ) -> i32;
    fn set_group_admin(&self, auth_code: i32, group_id: i64, qq_id: i64, set: bool) -> i32;
    fn set_group_anonymous(&self, auth_code: i32, group_id: i64, enable: bool) -> i32;
    fn set_group_leave(&self, auth_code: i32, group_id: i64, dismiss: bool) -> i32;
    fn set_group_kick(&self, auth_code: i32, group_id: i64, qq_id: i64, reject_forever: bool)
        -> i32;
    fn set_discuss_leave(&self, auth_code: i32, discuss_id: i64) -> i32;
}

/// Priority of a line written to the host's log window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    InfoSuccess,
    InfoReceive,
    InfoSend,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    pub fn priority(self) -> i32 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 10,
            LogLevel::InfoSuccess => 11,
            LogLevel::InfoReceive => 12,
            LogLevel::InfoSend => 13,
            LogLevel::Warning => 20,
            LogLevel::Error => 30,
            LogLevel::Fatal => 40,
        }
    }
}

/// Answer to a friend or group request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    Pass,
    Deny,
}

impl ResponseType {
    pub fn code(self) -> i32 {
        match self {
            ResponseType::Pass => 1,
            ResponseType::Deny => 2,
        }
    }
}

/// Kind of a group request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    /// Someone asked to join.
    GroupAdd,
    /// The logged-in account was invited.
    GroupInvite,
}

impl RequestType {
    pub fn code(self) -> i32 {
        match self {
            RequestType::GroupAdd => 1,
            RequestType::GroupInvite => 2,
        }
    }
}

/// Audio container the host converts a received voice clip into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Amr,
    Wma,
    M4a,
    Spx,
    Ogg,
    Wav,
    Flac,
}

impl AudioFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Amr => "amr",
            AudioFormat::Wma => "wma",
            AudioFormat::M4a => "m4a",
            AudioFormat::Spx => "spx",
            AudioFormat::Ogg => "ogg",
            AudioFormat::Wav => "wav",
            AudioFormat::Flac => "flac",
        }
    }
}
