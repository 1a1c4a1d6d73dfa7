use crate::test_fixture::TestFixture;
use crate::SCALAR_7;

pub const DEFAULT_RATIOS: [u32; 4] = [2_500, 2_500, 2_500, 2_500];

/// A fixture with one user funded with 1000 tokens who has deposited them,
/// and a harvest already run to settle the books
pub fn create_fixture_with_data<'a>(ratios: [u32; 4]) -> TestFixture<'a> {
    let mut fixture = TestFixture::create(ratios);

    let user = fixture.create_user(1_000 * SCALAR_7);
    fixture.vault.deposit(&(1_000 * SCALAR_7), &user);

    fixture.jump(1);
    fixture.strategy.harvest();

    fixture
}
