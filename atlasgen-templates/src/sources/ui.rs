/// The feature's StateFlow-backed view model.
pub(crate) const VIEW_MODEL: &str = r##"package com.sword.atlas.feature.{{slug}}.ui.viewmodel

import androidx.lifecycle.ViewModel
import androidx.lifecycle.viewModelScope
import com.sword.atlas.core.model.Result
import com.sword.atlas.core.model.UiState
import com.sword.atlas.feature.{{slug}}.data.model.{{symbol}}Response
import com.sword.atlas.feature.{{slug}}.data.repository.{{symbol}}Repository
import dagger.hilt.android.lifecycle.HiltViewModel
import kotlinx.coroutines.flow.MutableStateFlow
import kotlinx.coroutines.flow.asStateFlow
import kotlinx.coroutines.launch
import javax.inject.Inject

/**
 * {{symbol}} view model.
 */
@HiltViewModel
class {{symbol}}ViewModel @Inject constructor(
    private val repository: {{symbol}}Repository
) : ViewModel() {

    private val _uiState = MutableStateFlow<UiState<{{symbol}}Response>>(UiState.Idle)
    val uiState = _uiState.asStateFlow()

    fun load{{symbol}}() {
        viewModelScope.launch {
            _uiState.value = UiState.Loading

            when (val result = repository.get{{symbol}}()) {
                is Result.Success -> {
                    _uiState.value = UiState.Success(result.data)
                }
                is Result.Error -> {
                    _uiState.value = UiState.Error(result.code, result.message)
                }
            }
        }
    }
}
"##;

/// The routed entry activity for the feature.
pub(crate) const ACTIVITY: &str = r##"package com.sword.atlas.feature.{{slug}}.ui.activity

import android.view.View
import android.widget.Toast
import androidx.activity.viewModels
import androidx.lifecycle.lifecycleScope
import com.sword.atlas.core.model.UiState
import com.sword.atlas.core.router.annotation.Route
import com.sword.atlas.core.ui.base.BaseActivity
import com.sword.atlas.feature.{{slug}}.R
import com.sword.atlas.feature.{{slug}}.databinding.Activity{{symbol}}Binding
import com.sword.atlas.feature.{{slug}}.ui.viewmodel.{{symbol}}ViewModel
import dagger.hilt.android.AndroidEntryPoint
import kotlinx.coroutines.launch

/**
 * {{symbol}} screen.
 */
@Route("/{{slug}}")
@AndroidEntryPoint
class {{symbol}}Activity : BaseActivity<Activity{{symbol}}Binding>() {

    private val viewModel: {{symbol}}ViewModel by viewModels()

    override fun getLayoutId() = R.layout.activity_{{resource}}

    override fun initView() {
        binding.toolbar.setNavigationOnClickListener {
            finish()
        }

        binding.btnRefresh.setOnClickListener {
            viewModel.load{{symbol}}()
        }
    }

    override fun initData() {
        viewModel.load{{symbol}}()

        lifecycleScope.launch {
            viewModel.uiState.collect { state ->
                when (state) {
                    is UiState.Idle -> {
                        binding.progressBar.visibility = View.GONE
                    }
                    is UiState.Loading -> {
                        binding.progressBar.visibility = View.VISIBLE
                    }
                    is UiState.Success -> {
                        binding.progressBar.visibility = View.GONE
                        binding.tvContent.text = state.data.description
                    }
                    is UiState.Error -> {
                        binding.progressBar.visibility = View.GONE
                        Toast.makeText(this@{{symbol}}Activity, state.message, Toast.LENGTH_SHORT).show()
                    }
                }
            }
        }
    }
}
"##;
