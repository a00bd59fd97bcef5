use flume::Receiver;
use trackmap::interfaces::gui_interface::TrackSnapshot;

#[derive(Debug)]
pub struct FeedInterface {
    pub rx: Receiver<TrackSnapshot>,
    pub snapshot: TrackSnapshot,
}

impl FeedInterface {
    pub fn update(&mut self) {
        // loop to obtain the latest snapshot in the channel
        let mut tmp_message = self.rx.try_recv();
        let mut message = tmp_message.clone();

        while tmp_message.is_ok() {
            message = tmp_message.clone();
            tmp_message = self.rx.try_recv();
        }

        // update data stored in the feed interface (those are used within the GUI)
        if let Ok(x) = message {
            self.snapshot = x;
        }
    }
}
