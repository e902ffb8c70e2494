pub mod asteroid_card;
pub mod error_banner;
pub mod notification;
pub mod orbit_canvas;
pub mod risk_indicator;
pub mod sidebar;
