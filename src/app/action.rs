/// Side effects the event loop performs after the handler returns.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
}
