//! Shared UI components

pub mod helpers;
pub mod icons;
pub mod search_input;
pub mod song_card;
pub mod track_details;
pub mod track_grid;

pub use helpers::{BackButton, ErrorDisplay, LoadingSpinner, PageContainer};
pub use icons::{
    AlertTriangleIcon, ArrowLeftIcon, EllipsisIcon, MusicIcon, PauseIcon, PlayIcon, SearchIcon,
    XIcon,
};
pub use search_input::SearchInputView;
pub use song_card::SongCardView;
pub use track_details::{TrackDetailsPageView, TrackDetailsView};
pub use track_grid::{GridBody, RenderFn, TrackGridView};
