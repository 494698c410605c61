pub mod verify_credential_dto;
