// Step-gated navigation state shared by the menu, the eye and the overlay.

use bevy::prelude::*;

use crate::sections::{SECTION_COUNT, SectionId};

/// Highest reachable unlock rank.
pub const LAST_STEP: usize = SECTION_COUNT - 1;

pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Navigation>().configure_sets(
            Update,
            (
                NavigationSet::Menu,
                NavigationSet::Scene,
                NavigationSet::Overlay,
                NavigationSet::Present,
            )
                .chain(),
        );
    }
}

/// Frame order for everything that reads or writes [`Navigation`].
///
/// Input handlers run menu first, then the eye, then the overlay, so one
/// click is never seen by a later handler after an earlier one changed the
/// zoom. Visual easing runs last and sees the settled state.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationSet {
    Menu,
    Scene,
    Overlay,
    Present,
}

/// Unlock progress and the currently open section.
///
/// `is_zoomed` holds exactly when `active_section` is set; both change together
/// in [`Navigation::open_section`] and [`Navigation::close_section`].
/// `current_step` never decreases.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    current_step: usize,
    active_section: Option<SectionId>,
    is_zoomed: bool,
    hovered_ring: Option<usize>,
    is_sound_enabled: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            current_step: 0,
            active_section: None,
            is_zoomed: false,
            hovered_ring: None,
            is_sound_enabled: true,
        }
    }
}

impl Navigation {
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.active_section
    }

    pub fn is_zoomed(&self) -> bool {
        self.is_zoomed
    }

    pub fn hovered_ring(&self) -> Option<usize> {
        self.hovered_ring
    }

    pub fn is_sound_enabled(&self) -> bool {
        self.is_sound_enabled
    }

    pub fn set_hovered_ring(&mut self, ring: Option<usize>) {
        self.hovered_ring = ring;
    }

    pub fn toggle_sound(&mut self) {
        self.is_sound_enabled = !self.is_sound_enabled;
        debug!("sound enabled: {}", self.is_sound_enabled);
    }

    /// Opens `section` and zooms in.
    ///
    /// Does not check the unlock rank. Callers go through
    /// [`Navigation::request_open`] or check [`Navigation::is_clickable`] first.
    pub fn open_section(&mut self, section: SectionId) {
        self.active_section = Some(section);
        self.is_zoomed = true;
        debug!("opened {section} at step {}", self.current_step);
    }

    /// Closes the open section and advances the unlock rank by one.
    ///
    /// The rank advances even when nothing was open.
    pub fn close_section(&mut self) {
        self.active_section = None;
        self.is_zoomed = false;
        self.current_step = (self.current_step + 1).min(LAST_STEP);
        debug!("closed section, step now {}", self.current_step);
    }

    /// Advances the unlock rank without touching the open section.
    pub fn advance_step(&mut self) {
        self.current_step = (self.current_step + 1).min(LAST_STEP);
    }

    /// Opens the section at `index` if it is clickable. Returns whether it opened.
    pub fn request_open(&mut self, index: usize) -> bool {
        if !self.is_clickable(index) {
            return false;
        }
        match SectionId::from_index(index) {
            Some(section) => {
                self.open_section(section);
                true
            }
            None => false,
        }
    }

    pub fn is_unlocked(&self, index: usize) -> bool {
        index < SECTION_COUNT && index <= self.current_step
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_section
            .is_some_and(|section| section.index() == index)
    }

    pub fn is_clickable(&self, index: usize) -> bool {
        self.is_unlocked(index) && !self.is_zoomed
    }

    /// Progress shown in the corner, `round((step + 1) / N * 100)`.
    pub fn progress_percent(&self) -> u32 {
        (((self.current_step + 1) as f32 / SECTION_COUNT as f32) * 100.0).round() as u32
    }

    /// Section whose title the idle caption shows: the one before the current rank.
    pub fn caption_section(&self) -> Option<SectionId> {
        self.current_step
            .checked_sub(1)
            .and_then(SectionId::from_index)
    }
}

/// Zero-padded one-based rank label, e.g. `"03"`.
pub fn rank_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(nav: &Navigation) {
        assert_eq!(nav.is_zoomed(), nav.active_section().is_some());
        assert!(nav.current_step() <= LAST_STEP);
    }

    fn open_and_close(nav: &mut Navigation, index: usize) {
        assert!(nav.request_open(index), "section {index} should be clickable");
        assert_invariants(nav);
        nav.close_section();
        assert_invariants(nav);
    }

    #[test]
    fn initial_load() {
        let nav = Navigation::default();
        assert_eq!(nav.current_step(), 0);
        assert_eq!(nav.active_section(), None);
        assert!(!nav.is_zoomed());
        assert_eq!(nav.hovered_ring(), None);
        assert!(nav.is_sound_enabled());
        assert!(nav.is_clickable(0));
        assert!(!nav.is_clickable(1));
    }

    #[test]
    fn clicking_while_zoomed_is_ignored() {
        let mut nav = Navigation::default();
        assert!(nav.request_open(0));
        assert_eq!(nav.active_section(), Some(SectionId::About));
        assert!(nav.is_zoomed());

        let before = nav.clone();
        assert!(!nav.request_open(1));
        assert!(!nav.request_open(0));
        assert_eq!(nav, before);
    }

    #[test]
    fn closing_unlocks_the_next_section() {
        let mut nav = Navigation::default();
        open_and_close(&mut nav, 0);
        assert_eq!(nav.current_step(), 1);
        assert_eq!(nav.active_section(), None);
        assert!(!nav.is_zoomed());
        assert!(nav.is_clickable(1));
        assert!(!nav.is_clickable(2));
    }

    #[test]
    fn walking_every_section_caps_at_the_last_step() {
        let mut nav = Navigation::default();
        for index in 0..4 {
            open_and_close(&mut nav, index);
        }
        assert_eq!(nav.current_step(), 4);
        assert!(nav.is_clickable(4));

        open_and_close(&mut nav, 4);
        assert_eq!(nav.current_step(), LAST_STEP);
        for index in 0..SECTION_COUNT {
            assert!(nav.is_unlocked(index));
        }
    }

    #[test]
    fn open_is_idempotent() {
        let mut once = Navigation::default();
        once.open_section(SectionId::About);
        let mut twice = once.clone();
        twice.open_section(SectionId::About);
        assert_eq!(once, twice);
    }

    #[test]
    fn close_without_open_still_advances() {
        let mut nav = Navigation::default();
        nav.close_section();
        assert_eq!(nav.current_step(), 1);
        assert_invariants(&nav);
    }

    #[test]
    fn advance_step_caps_and_leaves_section_alone() {
        let mut nav = Navigation::default();
        nav.open_section(SectionId::About);
        for _ in 0..10 {
            nav.advance_step();
        }
        assert_eq!(nav.current_step(), LAST_STEP);
        assert_eq!(nav.active_section(), Some(SectionId::About));
        assert!(nav.is_zoomed());
    }

    #[test]
    fn step_never_decreases_and_unlocks_stay_unlocked() {
        let mut nav = Navigation::default();
        let mut previous = nav.current_step();
        let mut unlocked = vec![false; SECTION_COUNT];
        // Mixed sequence of every transition, including misuse.
        for round in 0..40 {
            match round % 6 {
                0 => {
                    nav.request_open(round % SECTION_COUNT);
                }
                1 => nav.close_section(),
                2 => nav.set_hovered_ring(Some(round % SECTION_COUNT)),
                3 => nav.toggle_sound(),
                4 => nav.open_section(SectionId::ALL[round % SECTION_COUNT]),
                _ => nav.advance_step(),
            }
            assert_invariants(&nav);
            assert!(nav.current_step() >= previous);
            previous = nav.current_step();
            for (index, was_unlocked) in unlocked.iter_mut().enumerate() {
                if *was_unlocked {
                    assert!(nav.is_unlocked(index));
                }
                *was_unlocked = nav.is_unlocked(index);
            }
        }
    }

    #[test]
    fn active_tracks_the_open_section() {
        let mut nav = Navigation::default();
        assert!(!nav.is_active(0));
        nav.open_section(SectionId::Works);
        assert!(nav.is_active(1));
        assert!(!nav.is_active(0));
        nav.close_section();
        assert!(!nav.is_active(1));
    }

    #[test]
    fn out_of_range_index_is_never_clickable() {
        let mut nav = Navigation::default();
        for _ in 0..SECTION_COUNT {
            nav.advance_step();
        }
        assert!(!nav.is_unlocked(SECTION_COUNT));
        assert!(!nav.request_open(SECTION_COUNT));
        assert!(!nav.is_zoomed());
    }

    #[test]
    fn progress_reflects_rank() {
        let mut nav = Navigation::default();
        let mut seen = Vec::new();
        for _ in 0..SECTION_COUNT {
            seen.push(nav.progress_percent());
            nav.advance_step();
        }
        assert_eq!(seen, vec![20, 40, 60, 80, 100]);
        assert_eq!(nav.progress_percent(), 100);
    }

    #[test]
    fn caption_names_the_previous_rank() {
        let mut nav = Navigation::default();
        assert_eq!(nav.caption_section(), None);
        nav.advance_step();
        assert_eq!(nav.caption_section(), Some(SectionId::About));
    }

    #[test]
    fn rank_labels_are_zero_padded() {
        assert_eq!(rank_label(0), "01");
        assert_eq!(rank_label(4), "05");
    }

    #[test]
    fn sound_toggle_is_independent() {
        let mut nav = Navigation::default();
        nav.open_section(SectionId::About);
        nav.toggle_sound();
        assert!(!nav.is_sound_enabled());
        assert!(nav.is_zoomed());
        nav.toggle_sound();
        assert!(nav.is_sound_enabled());
    }
}
