use validator::Validate;

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()
        .map_err(|err| AppError::Validation(err.to_string()))
}
