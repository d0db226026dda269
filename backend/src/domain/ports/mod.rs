//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters.
//! Driving ports (`*Command`, `*Query`) are implemented by domain services.

mod macros;
pub(crate) use macros::define_port_error;

mod tennis_session_command;
mod tennis_session_query;
mod tennis_session_repository;
mod tennis_string_command;
mod tennis_string_query;
mod tennis_string_repository;

#[cfg(test)]
pub use tennis_session_command::MockTennisSessionCommand;
pub use tennis_session_command::{
    CreateTennisSessionRequest, CreateTennisSessionResponse, DeleteTennisSessionRequest,
    FixtureTennisSessionCommand, NewTennisSessionPayload, TennisSessionCommand,
    TennisSessionPayload, UpdateTennisSessionRequest, UpdateTennisSessionResponse,
};
#[cfg(test)]
pub use tennis_session_query::MockTennisSessionQuery;
pub use tennis_session_query::{
    FixtureTennisSessionQuery, GetTennisSessionRequest, GetTennisSessionResponse,
    GetTennisSessionWithStringResponse, ListTennisSessionsRequest, ListTennisSessionsResponse,
    TennisSessionQuery,
};
#[cfg(test)]
pub use tennis_session_repository::MockTennisSessionRepository;
pub use tennis_session_repository::{
    FixtureTennisSessionRepository, TennisSessionRepository, TennisSessionRepositoryError,
};
#[cfg(test)]
pub use tennis_string_command::MockTennisStringCommand;
pub use tennis_string_command::{
    CreateTennisStringRequest, CreateTennisStringResponse, DeleteTennisStringRequest,
    FixtureTennisStringCommand, NewTennisStringPayload, TennisStringCommand, TennisStringPayload,
    TransitionTennisStringRequest, TransitionTennisStringResponse, UpdateTennisStringRequest,
    UpdateTennisStringResponse,
};
#[cfg(test)]
pub use tennis_string_query::MockTennisStringQuery;
pub use tennis_string_query::{
    FixtureTennisStringQuery, GetTennisStringRequest, GetTennisStringResponse,
    ListTennisStringsRequest, ListTennisStringsResponse, StringExistsRequest, StringUsageRequest,
    StringUsageResponse, TennisStringQuery,
};
#[cfg(test)]
pub use tennis_string_repository::MockTennisStringRepository;
pub use tennis_string_repository::{
    FixtureTennisStringRepository, StringListFilter, TennisStringRepository,
    TennisStringRepositoryError,
};
