pub mod admin_layout;
pub mod sidebar;

pub use admin_layout::AdminLayout;
pub use sidebar::Sidebar;
