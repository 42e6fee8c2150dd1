// =============================================================================
// OffGriid Web - Services
// =============================================================================

pub mod toast;

pub use toast::{show_toast, Toast, ToastQueue, ToastVariant};
