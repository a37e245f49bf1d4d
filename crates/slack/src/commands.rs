/// Payload of a slash-command invocation.
///
/// The command consumes no arguments: `text` is carried for logging only
/// and never parsed. Every invocation is answered with the ephemeral
/// industry picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlashCommandPayload {
    pub command: String,
    pub text: String,
    pub channel_id: String,
    pub user_id: String,
    pub response_url: String,
    pub request_id: String,
}
