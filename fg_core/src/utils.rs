pub mod rw_lock;
