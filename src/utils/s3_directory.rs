//! Storage directory derivation for room recordings
//!
//! Raw-track recordings for a room land in the bucket under
//! `{domain}/{room_name}/`, where `domain` is the first DNS label of the room
//! host. For `https://bearhug.daily.co/standup-42` that is `bearhug/standup-42`.

use thiserror::Error;
use url::Url;

/// Errors that can occur while deriving a storage directory
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("Invalid room URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Room URL must have a host")]
    MissingHost,

    #[error("Room URL must end with a room name")]
    MissingRoomName,

    #[error("Room name contains an invalid path sequence: {0}")]
    InvalidRoomName(String),
}

/// Derive the storage directory for a room URL.
///
/// Pure and deterministic: the same room URL always yields the same directory.
/// Query strings and fragments are ignored, as is a trailing slash.
pub fn construct_s3_directory(room_url: &str) -> Result<String, PathError> {
    let url = Url::parse(room_url.trim())?;

    let host = url.host_str().ok_or(PathError::MissingHost)?;
    let domain = host
        .split('.')
        .next()
        .filter(|label| !label.is_empty())
        .ok_or(PathError::MissingHost)?;

    let room_name = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or(PathError::MissingRoomName)?;

    if room_name == "." || room_name.contains("..") {
        return Err(PathError::InvalidRoomName(room_name.to_string()));
    }

    Ok(format!("{}/{}", domain, room_name))
}
