pub mod use_is_touch_device;
