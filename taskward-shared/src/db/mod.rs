/// Database connectivity
///
/// - `pool`: PostgreSQL connection pool construction and lifecycle

pub mod pool;
