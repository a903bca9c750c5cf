/// Mocked login gate: a boolean flag with no credential validation.
/// Sessions start unauthenticated; the catalog is gated on the flag and
/// nothing else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self) {
        self.authenticated = true;
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}
