use crate::render::Frame;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct Snapshot<'a> {
    generated_at: String,
    #[serde(flatten)]
    frame: &'a Frame,
}

pub fn to_json(frame: &Frame) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Snapshot {
        generated_at: Utc::now().to_rfc3339(),
        frame,
    })
}
