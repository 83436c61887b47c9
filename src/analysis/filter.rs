/// A filter either rewrites a token or rejects it by returning `None`
pub trait TokenFilter: Send + Sync {
    fn filter(&self, text: String) -> Option<String>;

    fn name(&self) -> &str;
}
