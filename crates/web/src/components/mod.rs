// =============================================================================
// OffGriid Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Primitives (buttons, inputs, reveal)
// 2. Sections
// 3. Overlays
// =============================================================================

pub mod common;
pub mod forms;
pub mod reveal;
pub mod split_text;

pub mod about;
pub mod background;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod step_drawer;

pub mod contact_modal;
pub mod toaster;

pub use common::{Button, ButtonVariant, CloseIcon, SectionTag};
pub use forms::{TextArea, TextInput};
pub use reveal::use_reveal;
pub use split_text::{SplitMode, SplitText};

pub use about::About;
pub use background::Background;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Navigation;
pub use step_drawer::{InfoStep, StepDrawer};

pub use contact_modal::ContactModal;
pub use toaster::Toaster;
