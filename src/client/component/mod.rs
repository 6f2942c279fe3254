pub mod header;
pub mod layout;
pub mod page;
pub mod protected_layout;
pub mod section;
pub mod sidebar;

pub use header::Header;
pub use layout::Layout;
pub use page::Page;
pub use protected_layout::{OwnerLayout, ProLayout, ProtectedLayout};
pub use sidebar::Sidebar;
