//! [`ActorEntity`] implementation for [`TaxRecord`].
//!
//! The service side of the required-field rule lives here: a payload with an
//! empty field never reaches the store.

use crate::framework::ActorEntity;
use crate::model::{TaxRecord, TaxRecordCreate, Tid};
use crate::record_actor::ServiceError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for TaxRecord {
    type Id = Tid;
    type Create = TaxRecordCreate;
    type Context = ();
    type Error = ServiceError;

    fn from_create_params(tid: Tid, params: TaxRecordCreate) -> Result<Self, ServiceError> {
        let blank = params.blank_fields();
        if !blank.is_empty() {
            return Err(ServiceError::Validation(format!(
                "required fields are empty: {}",
                blank.join(", ")
            )));
        }
        Ok(Self::new(tid, params.first_name, params.last_name, params.address))
    }
}
