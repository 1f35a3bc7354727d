pub mod navigation;
pub mod notification;

pub use navigation::HistoryNavigator;
pub use notification::ToastLog;
