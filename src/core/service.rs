/// A long-lived component owned by the app, named for logs.
pub trait Service {
    fn name(&self) -> &'static str;
}
