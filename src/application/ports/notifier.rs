/// ユーザー向けのトースト通知
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
