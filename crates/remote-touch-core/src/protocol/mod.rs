//! Protocol module containing the remote control message types and the
//! HTTP/JSON codec.

pub mod codec;
pub mod messages;

pub use codec::{
    base_url, decode_app_list, decode_screen_size, encode_command, request_url, stream_url,
    EncodedRequest, HttpMethod, ProtocolError, DEFAULT_CONTROL_PORT,
};
pub use messages::*;
