use crate::error::OrderError;
use crate::framework::{FrameworkError, StationClient, StationEntity};
use crate::model::{OrderIndex, StageResult};
use crate::stations::Ticket;
use async_trait::async_trait;

/// Trait for station-specific clients to inherit the shared request path.
///
/// Implementors only provide access to the inner [`StationClient`]; queueing the work
/// and translating transport failures into [`OrderError`] is shared.
#[async_trait]
pub trait StationHandle<T>: Send + Sync
where
    T: StationEntity<Request = Ticket, Output = StageResult>,
{
    /// Access the inner generic StationClient.
    fn inner(&self) -> &StationClient<T>;

    /// Map framework errors to the order-level error for `order`.
    ///
    /// A closed mailbox or a dropped reply means the station is gone, which the
    /// order sees as `ResourceUnavailable`; a failure inside the station is a
    /// `StageFailure`.
    fn map_error(e: FrameworkError, order: OrderIndex) -> OrderError {
        match e {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                OrderError::ResourceUnavailable {
                    order,
                    resource: T::NAME,
                }
            }
            FrameworkError::EntityError(cause) => OrderError::StageFailure {
                order,
                reason: format!("{}: {cause}", T::NAME),
            },
        }
    }

    /// Queue `ticket` and wait until the station has finished it.
    #[tracing::instrument(skip_all, fields(order = %ticket.order))]
    async fn perform(&self, ticket: Ticket) -> Result<StageResult, OrderError> {
        tracing::debug!("Sending request");
        let order = ticket.order;
        self.inner()
            .perform(ticket)
            .await
            .map_err(|e| Self::map_error(e, order))
    }

    /// Number of orders this station has finished.
    async fn served(&self) -> Result<u64, FrameworkError> {
        self.inner().served().await
    }
}
