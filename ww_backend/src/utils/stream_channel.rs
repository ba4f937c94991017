use tokio::sync::mpsc::{Receiver, Sender, channel};
use ww_core::types::stream_data::StreamData;

/// One slot: a fragment is handed to the response body before the next one
/// is accepted from upstream.
const STREAM_CHANNEL_CAPACITY: usize = 1;

pub struct StreamChannel {
    pub tx: Sender<StreamData>,
    pub rx: Receiver<StreamData>,
}

impl StreamChannel {
    pub fn new() -> StreamChannel {
        let (tx, rx) = channel::<StreamData>(STREAM_CHANNEL_CAPACITY);
        StreamChannel { tx, rx }
    }
}
