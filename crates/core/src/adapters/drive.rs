pub mod google_drive_store;
