//! Property-based tests for the subscription settings builder.

use super::builder::PersistentSubscriptionSettingsBuilder;
use super::settings::PersistentSubscriptionSettings;
use proptest::prelude::*;

type CountSetter = fn(
    &mut PersistentSubscriptionSettingsBuilder,
    i32,
) -> crate::Result<&mut PersistentSubscriptionSettingsBuilder>;

// The five range-checked mutators paired with the getter they affect
fn count_setters() -> Vec<(CountSetter, fn(&PersistentSubscriptionSettings) -> i32)> {
    vec![
        (
            PersistentSubscriptionSettingsBuilder::with_max_retries_of,
            PersistentSubscriptionSettings::max_retry_count,
        ),
        (
            PersistentSubscriptionSettingsBuilder::with_live_buffer_size_of,
            PersistentSubscriptionSettings::live_buffer_size,
        ),
        (
            PersistentSubscriptionSettingsBuilder::with_read_batch_of,
            PersistentSubscriptionSettings::read_batch_size,
        ),
        (
            PersistentSubscriptionSettingsBuilder::with_buffer_size_of,
            PersistentSubscriptionSettings::buffer_size,
        ),
        (
            PersistentSubscriptionSettingsBuilder::with_max_subscriber_count_of,
            PersistentSubscriptionSettings::max_subscriber_count,
        ),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Negative counts are rejected and leave every field as it was
    #[test]
    fn negative_counts_never_change_the_builder(count in i32::MIN..0) {
        for (set, _) in count_setters() {
            let mut builder = PersistentSubscriptionSettings::create();
            let before = builder.build();

            let result = set(&mut builder, count);
            prop_assert!(result.is_err());
            prop_assert!(result.unwrap_err().is_invalid_argument());
            prop_assert_eq!(builder.build(), before);
        }
    }

    // Non-negative counts are stored exactly
    #[test]
    fn non_negative_counts_are_stored(count in 0..=i32::MAX) {
        for (set, get) in count_setters() {
            let mut builder = PersistentSubscriptionSettings::create();
            prop_assert!(set(&mut builder, count).is_ok());
            prop_assert_eq!(get(&builder.build()), count);
        }
    }

    // Unchecked setters accept any value, including inverted checkpoint bounds
    #[test]
    fn unchecked_setters_store_any_value(
        position in any::<i64>(),
        timeout in any::<i32>(),
        min in any::<i32>(),
        max in any::<i32>(),
    ) {
        let settings = PersistentSubscriptionSettings::create()
            .start_from(position)
            .with_message_timeout_of(timeout)
            .minimum_check_point_count_of(min)
            .maximum_check_point_count_of(max)
            .build();

        prop_assert_eq!(settings.start_from(), position);
        prop_assert_eq!(settings.message_timeout_milliseconds(), timeout);
        prop_assert_eq!(settings.min_check_point_count(), min);
        prop_assert_eq!(settings.max_check_point_count(), max);
    }

    // Snapshots taken earlier are unaffected by later mutation
    #[test]
    fn snapshots_are_independent(first in any::<i64>(), second in any::<i64>()) {
        let mut builder = PersistentSubscriptionSettings::create();
        let snapshot = builder.start_from(first).build();
        let later = builder.start_from(second).build();

        prop_assert_eq!(snapshot.start_from(), first);
        prop_assert_eq!(later.start_from(), second);
    }

    // Any strategy name survives unchanged
    #[test]
    fn strategy_names_are_kept_verbatim(name in "[A-Za-z]{0,24}") {
        let settings = PersistentSubscriptionSettings::create()
            .with_named_consumer_strategy(name.clone())
            .build();
        prop_assert_eq!(settings.named_consumer_strategy().as_str(), name.as_str());
    }
}
