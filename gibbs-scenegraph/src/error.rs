use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GibbsSceneGraphError {
    #[error("Mark `{mark}` has {len} items but channel `{channel}` holds {actual} values")]
    ChannelLengthMismatch {
        mark: String,
        channel: &'static str,
        len: u32,
        actual: usize,
    },
}
