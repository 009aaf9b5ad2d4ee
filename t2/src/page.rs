use strum_macros::Display;

/// Site page a request originates from; the referer header mirrors
/// what the browser client would send for the same call.
#[derive(Clone, Copy, Display)]
pub(crate) enum Page {
    #[strum(serialize = "stock-exchange/my")]
    MyLots,
    #[strum(serialize = "internet")]
    Search,
    #[strum(serialize = "lk/remains")]
    Remains,
}
