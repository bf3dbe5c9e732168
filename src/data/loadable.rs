/// Per-panel fetch state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    /// Marks a fetch as started. Data already on screen stays there until
    /// the new result lands.
    pub fn begin(&mut self) {
        if !matches!(self, Self::Ready(_)) {
            *self = Self::Loading;
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Loadable<&T> {
        match self {
            Self::Idle => Loadable::Idle,
            Self::Loading => Loadable::Loading,
            Self::Failed(e) => Loadable::Failed(e.clone()),
            Self::Ready(v) => Loadable::Ready(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Self::Idle => Loadable::Idle,
            Self::Loading => Loadable::Loading,
            Self::Failed(e) => Loadable::Failed(e),
            Self::Ready(v) => Loadable::Ready(f(v)),
        }
    }
}

impl<T> From<Result<T, String>> for Loadable<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(v) => Self::Ready(v),
            Err(e) => Self::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_result() {
        let ok: Loadable<u8> = Ok(3).into();
        assert_eq!(ok.ready(), Some(&3));
        let err: Loadable<u8> = Err("down".to_string()).into();
        assert_eq!(err.error(), Some("down"));
        assert!(!err.is_pending());
    }

    #[test]
    fn begin_keeps_ready_data() {
        let mut l = Loadable::Ready(1u8);
        l.begin();
        assert_eq!(l, Loadable::Ready(1));

        let mut l: Loadable<u8> = Loadable::Failed("boom".into());
        l.begin();
        assert!(l.is_loading());
    }

    #[test]
    fn map_keeps_state() {
        let l: Loadable<u8> = Loadable::Loading;
        assert!(l.map(|v| v * 2).is_loading());
        assert_eq!(Loadable::Ready(2).map(|v| v * 2), Loadable::Ready(4));
        assert!(Loadable::<u8>::default().is_pending());
    }
}
