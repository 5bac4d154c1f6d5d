// Panel state machine and tab metadata.

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SidePanelTab {
    Queue,
    Lyrics,
    Details,
}

impl SidePanelTab {
    pub const ALL: [SidePanelTab; 3] = [
        SidePanelTab::Queue,
        SidePanelTab::Lyrics,
        SidePanelTab::Details,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Queue => "Queue",
            Self::Lyrics => "Lyrics",
            Self::Details => "Details",
        }
    }

    fn icon_name(self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::Lyrics => "lyrics",
            Self::Details => "info",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct SidePanelState {
    pub is_open: bool,
    pub active_tab: SidePanelTab,
}

impl Default for SidePanelState {
    fn default() -> Self {
        Self {
            is_open: false,
            active_tab: SidePanelTab::Queue,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct SidePanelController {
    state: Signal<SidePanelState>,
}

impl SidePanelController {
    pub fn new() -> Self {
        Self {
            state: Signal::new(SidePanelState::default()),
        }
    }

    pub fn open(&mut self, tab: SidePanelTab) {
        self.state.with_mut(|state| {
            state.is_open = true;
            state.active_tab = tab;
        });
    }

    pub fn close(&mut self) {
        self.state.with_mut(|state| {
            state.is_open = false;
        });
    }

    pub fn set_tab(&mut self, tab: SidePanelTab) {
        self.state.with_mut(|state| {
            state.active_tab = tab;
        });
    }

    pub fn current(&self) -> SidePanelState {
        (self.state)()
    }
}
