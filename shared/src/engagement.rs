/// Viewer's like state for one article. Lives for the page session only.
///
/// The seed count is kept as loaded; the displayed count is derived from it
/// and the viewer's flag, so toggling back always restores the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    seed: u32,
    liked: bool,
}

impl LikeState {
    pub fn new(initial_likes: u32) -> Self {
        Self {
            seed: initial_likes,
            liked: false,
        }
    }

    pub fn likes(&self) -> u32 {
        self.seed.saturating_add(u32::from(self.liked))
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    /// Flip the flag, which moves the counter by one. Returns the new flag.
    pub fn toggle(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }

    /// [`toggle`](Self::toggle), then hand the new flag to `observer`.
    pub fn toggle_with(&mut self, observer: impl FnOnce(bool)) -> bool {
        let liked = self.toggle();
        tracing::trace!(liked, likes = self.likes(), "like toggled");
        observer(liked);
        liked
    }

    /// Button label, e.g. `1 Like` or `12 Likes`.
    pub fn label(&self) -> String {
        if self.likes() == 1 {
            "1 Like".to_string()
        } else {
            format!("{} Likes", self.likes())
        }
    }
}
