//! Typed forwarding layer over [`NativeHost`].

use std::time::Duration;

use cqp_pack::cqcode::praise_count;
use cqp_pack::model::{
    AnonymousIdentity, FloatWindow, Group, GroupFile, GroupMember, StrangerInfo,
};
use cqp_pack::record::Record;
use cqp_pack::WireFormat;

use crate::host::{AudioFormat, LogLevel, NativeHost, RequestType, ResponseType};
use crate::{payload, ApiError, HostContext};

/// Plugin-side view of the host.
///
/// Calls that return structured data decode the host's base64 payload with
/// the configured [`WireFormat`]. Those return `None` both when the host has
/// nothing and when the payload does not decode; the decode failure is
/// logged.
pub struct CqpApi<H> {
    host: H,
    context: HostContext,
    format: WireFormat,
}

fn duration_secs(duration: Duration) -> i64 {
    i64::try_from(duration.as_secs()).unwrap_or(i64::MAX)
}

impl<H: NativeHost> CqpApi<H> {
    pub fn new(host: H, context: HostContext, format: WireFormat) -> Self {
        Self {
            host,
            context,
            format,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn context(&self) -> &HostContext {
        &self.context
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    fn auth(&self) -> i32 {
        self.context.auth_code()
    }

    fn decode_or_none<T: Record>(&self, what: &str, text: &str) -> Option<T> {
        match payload::decode_record(text, self.format) {
            Ok(value) => Some(value),
            Err(ApiError::Empty) => None,
            Err(err) => {
                log::warn!("discarding {what} payload: {err}");
                None
            }
        }
    }

    fn decode_list_or_none<T: Record>(&self, what: &str, text: &str) -> Option<Vec<T>> {
        match payload::decode_record_list(text, self.format) {
            Ok(values) => {
                log::debug!("decoded {} {what} entries", values.len());
                Some(values)
            }
            Err(ApiError::Empty) => None,
            Err(err) => {
                log::warn!("discarding {what} payload: {err}");
                None
            }
        }
    }

    // ---------------------------------------------------------------- messages

    pub fn send_private_message(&self, qq_id: i64, message: &str) -> i32 {
        self.host.send_private_msg(self.auth(), qq_id, message)
    }

    pub fn send_group_message(&self, group_id: i64, message: &str) -> i32 {
        self.host.send_group_msg(self.auth(), group_id, message)
    }

    pub fn send_discuss_message(&self, discuss_id: i64, message: &str) -> i32 {
        self.host.send_discuss_msg(self.auth(), discuss_id, message)
    }

    /// Recalls a message by id.
    pub fn repeal_message(&self, message_id: i64) -> i32 {
        self.host.delete_msg(self.auth(), message_id)
    }

    /// Sends profile likes; counts outside `1..=10` send one.
    pub fn send_praise(&self, qq_id: i64, count: i32) -> i32 {
        self.host.send_like(self.auth(), qq_id, praise_count(count))
    }

    /// Converts a received voice clip and returns its file name under the
    /// host's `data/record` directory.
    pub fn receive_record(&self, file: &str, format: AudioFormat) -> String {
        self.host.get_record(self.auth(), file, format.as_str())
    }

    // ---------------------------------------------------------------- session

    pub fn login_qq(&self) -> i64 {
        self.host.get_login_qq(self.auth())
    }

    pub fn login_nick(&self) -> String {
        self.host.get_login_nick(self.auth())
    }

    /// Plugin data directory; asked of the host once and cached.
    pub fn app_directory(&self) -> &str {
        self.context
            .app_directory_or_init(|| self.host.get_app_directory(self.context.auth_code()))
    }

    pub fn cookies(&self) -> String {
        self.host.get_cookies(self.auth())
    }

    pub fn csrf_token(&self) -> i32 {
        self.host.get_csrf_token(self.auth())
    }

    // ---------------------------------------------------------------- lookups

    pub fn stranger_info(&self, qq_id: i64, no_cache: bool) -> Option<StrangerInfo> {
        let text = self.host.get_stranger_info(self.auth(), qq_id, no_cache);
        self.decode_or_none("stranger info", &text)
    }

    pub fn group_member_info(
        &self,
        group_id: i64,
        qq_id: i64,
        no_cache: bool,
    ) -> Option<GroupMember> {
        let text = self
            .host
            .get_group_member_info(self.auth(), group_id, qq_id, no_cache);
        self.decode_or_none("group member", &text)
    }

    /// Members in the host's order. A payload that fails anywhere yields
    /// `None`, never a partial list.
    pub fn group_member_list(&self, group_id: i64) -> Option<Vec<GroupMember>> {
        let text = self.host.get_group_member_list(self.auth(), group_id);
        self.decode_list_or_none("group member", &text)
    }

    pub fn group_list(&self) -> Option<Vec<Group>> {
        let text = self.host.get_group_list(self.auth());
        self.decode_list_or_none("group", &text)
    }

    /// Decodes the anonymous-sender parameter of a group message event.
    pub fn anonymous(&self, text: &str) -> Option<AnonymousIdentity> {
        self.decode_or_none("anonymous identity", text)
    }

    /// Decodes the file parameter of a group upload event.
    pub fn group_file(&self, text: &str) -> Option<GroupFile> {
        self.decode_or_none("group file", text)
    }

    /// Encodes the status floating window payload.
    pub fn float_window(&self, window: &FloatWindow) -> String {
        payload::encode_record(window, self.format)
    }

    // ---------------------------------------------------------------- logging

    pub fn add_log(&self, level: LogLevel, category: &str, content: &str) -> i32 {
        self.host
            .add_log(self.auth(), level.priority(), category, content)
    }

    pub fn add_fatal_error(&self, message: &str) -> i32 {
        self.host.set_fatal(self.auth(), message)
    }

    // ---------------------------------------------------------------- requests

    pub fn set_friend_add_request(
        &self,
        response_flag: &str,
        response: ResponseType,
        remark: Option<&str>,
    ) -> i32 {
        self.host.set_friend_add_request(
            self.auth(),
            response_flag,
            response.code(),
            remark.unwrap_or_default(),
        )
    }

    pub fn set_group_add_request(
        &self,
        response_flag: &str,
        request: RequestType,
        response: ResponseType,
        reason: Option<&str>,
    ) -> i32 {
        self.host.set_group_add_request(
            self.auth(),
            response_flag,
            request.code(),
            response.code(),
            reason.unwrap_or_default(),
        )
    }

    // ---------------------------------------------------------------- management

    /// Mutes an anonymous sender. The host cannot lift an anonymous ban, so
    /// this only ever sets one; a zero duration is passed through as is.
    pub fn set_group_anonymous_ban(
        &self,
        group_id: i64,
        anonymous: &str,
        duration: Duration,
    ) -> i32 {
        self.host
            .set_group_anonymous_ban(self.auth(), group_id, anonymous, duration_secs(duration))
    }

    /// Mutes a member; [`Duration::ZERO`] lifts the ban.
    pub fn set_group_ban(&self, group_id: i64, qq_id: i64, duration: Duration) -> i32 {
        self.host
            .set_group_ban(self.auth(), group_id, qq_id, duration_secs(duration))
    }

    pub fn set_group_whole_ban(&self, group_id: i64, enable: bool) -> i32 {
        self.host.set_group_whole_ban(self.auth(), group_id, enable)
    }

    pub fn set_group_card(&self, group_id: i64, qq_id: i64, card: &str) -> i32 {
        self.host.set_group_card(self.auth(), group_id, qq_id, card)
    }

    /// Sets a member's special title. `None` keeps it forever; an empty
    /// title removes it.
    pub fn set_group_special_title(
        &self,
        group_id: i64,
        qq_id: i64,
        title: &str,
        duration: Option<Duration>,
    ) -> i32 {
        let secs = duration.map_or(-1, duration_secs);
        self.host
            .set_group_special_title(self.auth(), group_id, qq_id, title, secs)
    }

    pub fn set_group_admin(&self, group_id: i64, qq_id: i64, set: bool) -> i32 {
        self.host.set_group_admin(self.auth(), group_id, qq_id, set)
    }

    pub fn set_group_anonymous(&self, group_id: i64, enable: bool) -> i32 {
        self.host.set_group_anonymous(self.auth(), group_id, enable)
    }

    /// Leaves a group, or dissolves it when `dismiss` is set and the plugin
    /// account owns it.
    pub fn set_group_leave(&self, group_id: i64, dismiss: bool) -> i32 {
        self.host.set_group_leave(self.auth(), group_id, dismiss)
    }

    pub fn set_group_kick(&self, group_id: i64, qq_id: i64, reject_forever: bool) -> i32 {
        self.host
            .set_group_kick(self.auth(), group_id, qq_id, reject_forever)
    }

    pub fn set_discuss_leave(&self, discuss_id: i64) -> i32 {
        self.host.set_discuss_leave(self.auth(), discuss_id)
    }
}
