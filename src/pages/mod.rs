pub mod about;
pub mod booking;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod slot_card;
pub mod slot_group;
