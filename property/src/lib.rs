/*!
Observable properties: a value container that notifies registered observers whenever the value is replaced.

# Guarantees
- `set` swaps the value atomically and then notifies every observer that was registered before the call,
  in registration order, exactly once, with the `(old, new)` pair of that call.
- No observer ever runs while the property's internal lock is held, so observers may freely call back into
  the property: `set` again, register new observers, or release handles (their own included).
- Observers registered during a notification are first called on the next `set`.
- Every registration returns a [`Handle`]. Releasing it is idempotent and its slot is never reused.

# Basic usage

```rust
use observable_property::*;

let property = Property::new(1);
let handle = property.observe(|old: Option<&i32>, new: &i32| println!("{old:?} -> {new}"));
property.set(2); // prints: Some(1) -> 2
handle.release();
property.set(3); // nothing printed
assert_eq!(property.get(), Some(3));
```

# Typed properties

```rust
use observable_property::*;
use std::sync::{Arc, Mutex};

let name = Text::default();
assert_eq!(name.get(), ""); // empty reads as the default

let mirror = Arc::new(Mutex::new(String::new()));
let _binding = name.bind(mirror.clone());
let _changes = name.observe(|old, new| println!("renamed {old:?} to {new:?}"));

name.set("Buffy".to_string()).set("Buffy".to_string()); // observer fires once
assert_eq!(*mirror.lock().unwrap(), "Buffy");

let flag = Bool::default();
flag.toggle();
assert!(flag.get());
```
*/

mod handle;
mod listener;
mod property;
mod typed;
#[cfg(feature = "tokio")]
mod wait;

pub use handle::*;
pub use listener::*;
pub use property::*;
pub use typed::*;
