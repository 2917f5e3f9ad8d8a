/*!
 * Core Types
 * Common types used across the simulation engine
 */

use smartstring::alias::String as SmartString;

/// Process ID type
pub type Pid = u32;

/// Size type for capacities and requests, in KB
pub type Size = usize;

/// Position of a block within a pool
pub type BlockIndex = usize;

/// Short label type for segment names and region tags
///
/// Inline-optimized: the tags this engine produces ("Block 3", "Stack")
/// stay under the heap-allocation threshold.
pub type Label = SmartString;
