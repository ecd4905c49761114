/// The parts of the host media player the annotations depend on.
///
/// Methods take `&self`; the host player is a shared handle and its
/// implementations use interior mutability where they need it.
pub trait Player {
    fn on_metadata_ready(&self, callback: Box<dyn FnMut()>);
    fn on_time_update(&self, callback: Box<dyn FnMut()>);
    fn current_time(&self) -> f64;
    fn set_current_time(&self, time: f64);
    /// Media duration in seconds, `None` until metadata is loaded.
    fn duration(&self) -> Option<f64>;
    fn emit_time_update(&self);

    fn has_metadata(&self) -> bool {
        self.duration().is_some_and(|d| d.is_finite() && d > 0.0)
    }

    /// Asks the player to fetch metadata without waiting for playback.
    fn request_preload(&self) {}
}
