pub mod data_set;
pub mod entry;
pub mod interval;
pub mod item;
pub mod primitives;
pub mod scale;
pub mod stack;
pub mod types;
pub mod unit;

pub use data_set::{AxisDependency, DataSetStyle, StackData, StackDataSet};
pub use entry::{EntryStyle, StackEntry, UnitMut};
pub use interval::{
    Interval, SearchStrategy, find_containing, index_containing, index_containing_linear,
    is_sorted_disjoint,
};
pub use item::{ItemStyle, StackItem};
pub use primitives::{Color, hours_since_midnight};
pub use scale::LinearScale;
pub use stack::{AddRejection, Stack, StackChild, StackContainer};
pub use types::{PlotArea, Viewport};
pub use unit::{StackUnit, UnitStyle};
