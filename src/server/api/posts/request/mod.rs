use serde::Deserialize;
/// Form submission for the post edit endpoint.
#[derive(Deserialize, Debug)]
pub struct PostPayload {
    /// Submitted post body. A missing field is treated as empty, which the
    /// validator then rejects like any other short body.
    #[serde(default)]
    pub body: String,
}
