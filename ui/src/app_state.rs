use rates::format::NumberStyle;
use rates::prefs::user_prefs::UserPrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: UserPrefs,
    pub number_style: NumberStyle,
}

/// Settings fixed for the whole session.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs) -> Self {
        let number_style = prefs.display_preference().number_style();
        Self(Arc::new(AppStateData {
            prefs,
            number_style,
        }))
    }
}
