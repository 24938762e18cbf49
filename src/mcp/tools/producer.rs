use tracing::warn;

use crate::error::MalError;
use crate::jikan::Endpoint;
use crate::mcp::MalServer;
use crate::models::{Listing, ProducerDetails, ProducerParams};

impl MalServer {
    /// Handler for get_producer_details - studio/producer search by name.
    pub async fn handle_producer_details(
        &self,
        params: ProducerParams,
    ) -> Result<Listing<ProducerDetails>, MalError> {
        let query = params
            .to_query()
            .inspect_err(|e| warn!(tool = "get_producer_details", "Rejected parameters: {}", e))?;

        self.client
            .fetch_list::<ProducerDetails>(&Endpoint::Producers, &query)
            .await
            .map(Listing::from)
    }
}
