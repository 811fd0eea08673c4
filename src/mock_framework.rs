//! # Mock Framework
//!
//! Utilities for testing clients and the reservation engine without a running
//! store actor.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then script the
//! actor's replies with [`expect_get`], [`expect_list`], [`expect_action`] or
//! [`expect_create`].

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and the receiver its requests arrive on.
///
/// The test plays the actor: it inspects each request and answers through the
/// request's responder, which makes success, failure and interleavings
/// deterministic.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is a Create
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Get
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a List
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Option<T::Filter>, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Action
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ClubClient;
    use crate::club_actor::ClubError;
    use crate::domain::{Club, ClubFilter};

    #[tokio::test]
    async fn test_mock_client_search() {
        let (inner, mut receiver) = create_mock_client::<Club>(10);
        let client = ClubClient::new(inner);

        let search_task = tokio::spawn(async move {
            let filter = ClubFilter::from_query("chess").expect("non-blank query");
            client.search_clubs(filter).await
        });

        let (filter, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(filter, ClubFilter::from_query("CHESS"));
        responder.send(Ok(vec![Club::new(1, "Chess", "Hall", 5)])).unwrap();

        let result = search_task.await.unwrap().unwrap();
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_communication_error() {
        let (inner, mut receiver) = create_mock_client::<Club>(10);
        let client = ClubClient::new(inner);

        let get_task = tokio::spawn(async move { client.get_club(1).await });

        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        drop(responder);

        assert_eq!(
            get_task.await.unwrap(),
            Err(ClubError::ActorCommunicationError(FrameworkError::ActorDropped.to_string()))
        );
    }
}
