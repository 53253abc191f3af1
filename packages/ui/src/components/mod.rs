//! Small design-system primitives shared by every screen.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{FieldError, Input, Label, Select, Textarea};

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider, ToastVariant, Toasts};
