/// A unit-test stub for the feature's view model.
pub(crate) const VIEW_MODEL_TEST: &str = r##"package com.sword.atlas.feature.{{slug}}

import com.sword.atlas.feature.{{slug}}.data.repository.{{symbol}}Repository
import com.sword.atlas.feature.{{slug}}.ui.viewmodel.{{symbol}}ViewModel
import io.mockk.mockk
import org.junit.Before
import org.junit.Test

/**
 * {{symbol}}ViewModel unit tests.
 */
class {{symbol}}ViewModelTest {

    private lateinit var repository: {{symbol}}Repository
    private lateinit var viewModel: {{symbol}}ViewModel

    @Before
    fun setup() {
        repository = mockk()
        viewModel = {{symbol}}ViewModel(repository)
    }

    @Test
    fun `load {{symbol}} starts idle`() {
        // Exercise load{{symbol}} against a stubbed repository here.
    }
}
"##;
