mod toast;

pub use toast::{ToastContainer, use_toasts};
