/// A registered (method, path-pattern) pair the matcher tests requests against.
///
/// The pattern is a `/`-delimited sequence of segments. A segment of the form
/// `:<name>` captures the corresponding path segment under `name`; every other
/// segment is a literal and must match exactly. The method is compared by
/// exact string equality, so routes should be registered with the same casing
/// requests arrive with (conventionally upper-case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// HTTP method token, e.g. "GET"
    pub method: String,
    /// Path pattern, e.g. "/toasters/:toaster_id"
    pub pattern: String,
}

impl Route {
    pub fn new(method: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            pattern: pattern.into(),
        }
    }
}

/// An ordered collection of routes.
///
/// Registration order is significant: the matcher scans the table front to
/// back and the first structurally matching route wins. Callers who want a
/// literal route like `/toasters/new` to beat `/toasters/:toaster_id` must
/// register it first. The table is never reordered or mutated by matching.
///
/// # Example
///
/// ```
/// # use junction::router::RouteTable;
/// let table = RouteTable::new()
///     .route("GET", "/toasters/new")
///     .route("GET", "/toasters/:toaster_id");
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.routes()[0].pattern, "/toasters/new");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route, consuming and returning the table for chaining.
    pub fn route(mut self, method: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.routes.push(Route::new(method, pattern));
        self
    }

    /// Appends a route in place.
    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// The routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
