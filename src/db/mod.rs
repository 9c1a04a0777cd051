pub mod contact_file;
